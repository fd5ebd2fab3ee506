// Double-double approximations of powers of 10 used to scale values of the
// general range into [1e17, 1e19). Entry i is (val, off) with val the double
// nearest to 10**(308 - i) and off the double nearest to the residual.
// Generated with gen-pow10/main.rs.

/// Table index of 10**18, the power that maps a value near 1 into the
/// 18-digit window.
pub const POW10_BIAS: i32 = 290;

/// Table index of 10**0.
pub const POW10_UNIT: i32 = 308;

#[rustfmt::skip]
pub static POW10: [(f64, f64); 600] = [
    (1e308, -1.0979063629440455e291), //  308
    (1e307, 1.3968940239743542e290), //  307
    (1e306, -1.7216064596736455e289), //  306
    (1e305, 6.074644749446354e288), //  305
    (1e304, 6.0746447494463536e287), //  304
    (1e303, -1.6176507678645645e284), //  303
    (1e302, -7.629703079084895e285), //  302
    (1e301, -5.250476025520442e284), //  301
    (1e300, -5.250476025520442e283), //  300
    (1e299, -5.250476025520442e282), //  299
    (1e298, 4.043379652465702e281), //  298
    (1e297, -1.765280146275638e280), //  297
    (1e296, 1.8651322279376996e279), //  296
    (1e295, 1.8651322279376996e278), //  295
    (1e294, -6.64364677412481e277), //  294
    (1e293, 7.53765156264604e276), //  293
    (1e292, -1.3256598978357416e275), //  292
    (1e291, 4.2139097649653716e274), //  291
    (1e290, -6.172783352786716e273), //  290
    (1e289, -6.172783352786716e272), //  289
    (1e288, -7.6304735395750355e270), //  288
    (1e287, -7.525217352494019e270), //  287
    (1e286, -3.2988611034086966e269), //  286
    (1e285, 1.9840842079479558e268), //  285
    (1e284, -7.921438250845768e267), //  284
    (1e283, 4.460464822646387e266), //  283
    (1e282, -3.27822459828621e265), //  282
    (1e281, -3.2782245982862097e264), //  281
    (1e280, -3.27822459828621e263), //  280
    (1e279, -5.797329227496039e262), //  279
    (1e278, 3.6493131320408215e261), //  278
    (1e277, -2.8678785109953724e259), //  277
    (1e276, -5.2069140800249854e259), //  276
    (1e275, 4.01832259921023e258), //  275
    (1e274, 7.862171215558236e257), //  274
    (1e273, 5.459765830340733e256), //  273
    (1e272, -6.552261095746788e255), //  272
    (1e271, 4.709014147460262e254), //  271
    (1e270, -4.675381888545613e253), //  270
    (1e269, -4.675381888545613e252), //  269
    (1e268, 2.6561775145839774e251), //  268
    (1e267, 2.6561775145839772e250), //  267
    (1e266, -3.071603269111015e249), //  266
    (1e265, -6.651466258920385e248), //  265
    (1e264, -4.414051890289529e247), //  264
    (1e263, -1.6172839295009584e246), //  263
    (1e262, -1.6172839295009582e245), //  262
    (1e261, 7.122615947963324e244), //  261
    (1e260, -6.5334776105746174e243), //  260
    (1e259, 7.122615947963324e242), //  259
    (1e258, -5.679971763165996e241), //  258
    (1e257, -3.0127659900140542e240), //  257
    (1e256, -3.012765990014054e239), //  256
    (1e255, 1.1547430305358546e238), //  255
    (1e254, 6.364129306223241e237), //  254
    (1e253, 6.364129306223241e236), //  253
    (1e252, -9.915202805299841e235), //  252
    (1e251, -4.827911520448878e234), //  251
    (1e250, 7.89031669167853e233), //  250
    (1e249, 7.89031669167853e232), //  249
    (1e248, -4.529828046727142e231), //  248
    (1e247, 4.785280507077112e230), //  247
    (1e246, -6.858605185178205e229), //  246
    (1e245, -4.432795665958348e228), //  245
    (1e244, -7.4650575649831695e227), //  244
    (1e243, -7.46505756498317e226), //  243
    (1e242, -5.0961029563700274e225), //  242
    (1e241, -5.096102956370027e224), //  241
    (1e240, -1.3946113804119925e223), //  240
    (1e239, 9.188208545617794e221), //  239
    (1e238, -4.86475973287265e221), //  238
    (1e237, 5.979453868566905e220), //  237
    (1e236, -5.316601966265965e219), //  236
    (1e235, -5.316601966265965e218), //  235
    (1e234, -1.7865845178806931e217), //  234
    (1e233, 2.6259372926008967e216), //  233
    (1e232, -5.647541102052084e215), //  232
    (1e231, -5.647541102052084e214), //  231
    (1e230, -9.956644432600512e213), //  230
    (1e229, 8.161138937705572e211), //  229
    (1e228, 7.549087847752475e211), //  228
    (1e227, -9.28334703720232e210), //  227
    (1e226, 3.866992716668614e209), //  226
    (1e225, 7.154577655136347e208), //  225
    (1e224, 3.0450964820516807e207), //  224
    (1e223, -4.6601807174820696e206), //  223
    (1e222, -4.66018071748207e205), //  222
    (1e221, -4.6601807174820695e204), //  221
    (1e220, 3.562757926310489e202), //  220
    (1e219, 3.491561111451748e202), //  219
    (1e218, -8.265758834125874e201), //  218
    (1e217, 3.9814494425174824e200), //  217
    (1e216, -2.142154695804196e199), //  216
    (1e215, 9.33960306354895e198), //  215
    (1e214, 4.55553733048514e197), //  214
    (1e213, 1.5654962473202578e196), //  213
    (1e212, 9.040598955232462e195), //  212
    (1e211, 4.368659762787335e194), //  211
    (1e210, 7.288621758065539e193), //  210
    (1e209, -7.311188218325486e192), //  209
    (1e208, 1.8136930169189052e191), //  208
    (1e207, -3.889357755108839e190), //  207
    (1e206, -3.889357755108839e189), //  206
    (1e205, -1.6616035472855014e188), //  205
    (1e204, 1.1230892124936706e187), //  204
    (1e203, 1.1230892124936706e186), //  203
    (1e202, 9.825254086803583e185), //  202
    (1e201, -3.771878529305655e184), //  201
    (1e200, 3.0266877787489637e183), //  200
    (1e199, -9.720624048853447e182), //  199
    (1e198, -1.75355415660194e181), //  198
    (1e197, 4.885670753607649e180), //  197
    (1e196, 4.885670753607649e179), //  196
    (1e195, 2.292223523057028e178), //  195
    (1e194, 5.534032561245304e177), //  194
    (1e193, -6.622751331960731e176), //  193
    (1e192, -4.09008802087614e175), //  192
    (1e191, -7.2559171597318776e174), //  191
    (1e190, -7.255917159731878e173), //  190
    (1e189, -2.309309130269787e172), //  189
    (1e188, -2.309309130269787e171), //  188
    (1e187, 9.284303438781988e170), //  187
    (1e186, 2.0382955831246284e169), //  186
    (1e185, 2.0382955831246285e168), //  185
    (1e184, -1.735666841696913e167), //  184
    (1e183, 5.340512704843477e166), //  183
    (1e182, -6.453119872723839e165), //  182
    (1e181, 8.288920849235307e164), //  181
    (1e180, -9.248546019891598e162), //  180
    (1e179, 1.954450226518486e162), //  179
    (1e178, -5.243811844750628e161), //  178
    (1e177, -7.44898050207432e159), //  177
    (1e176, -7.44898050207432e158), //  176
    (1e175, 6.284654753766313e158), //  175
    (1e174, -6.895756753684458e157), //  174
    (1e173, -1.4039186255799706e156), //  173
    (1e172, -8.2687162857105805e155), //  172
    (1e171, 4.602779327034313e154), //  171
    (1e170, -3.441905430931245e153), //  170
    (1e169, 6.613950516525703e152), //  169
    (1e168, 6.613950516525703e151), //  168
    (1e167, -3.860899428741951e150), //  167
    (1e166, 5.959272394946475e149), //  166
    (1e165, 1.0051010654816651e149), //  165
    (1e164, -1.7833499485879184e146), //  164
    (1e163, 6.21500603618836e146), //  163
    (1e162, 6.21500603618836e145), //  162
    (1e161, -3.774589324822815e144), //  161
    (1e160, -6.528407745068227e142), //  160
    (1e159, 7.151530601283158e142), //  159
    (1e158, 4.712664546348789e141), //  158
    (1e157, 1.6640819776808279e140), //  157
    (1e156, 1.6640819776808277e139), //  156
    (1e155, -7.176231540910168e137), //  155
    (1e154, -3.6947545688058227e137), //  154
    (1e153, 2.6659699587684626e134), //  153
    (1e152, -4.6251081359041995e135), //  152
    (1e151, -1.717753238721772e134), //  151
    (1e150, 1.9164403827562624e133), //  150
    (1e149, -4.897672657515052e132), //  149
    (1e148, -4.897672657515052e131), //  148
    (1e147, 2.200361759434234e130), //  147
    (1e146, 6.636633270027537e129), //  146
    (1e145, 1.091293881785908e128), //  145
    (1e144, -2.3745432358651106e127), //  144
    (1e143, -2.3745432358651105e126), //  143
    (1e142, -5.082228484029969e125), //  142
    (1e141, -1.697621923823896e124), //  141
    (1e140, -5.928380124081487e123), //  140
    (1e139, -3.2841562489204925e122), //  139
    (1e138, -3.2841562489204927e121), //  138
    (1e137, -3.2841562489204925e120), //  137
    (1e136, -5.866406127007401e119), //  136
    (1e135, 3.817030915818506e118), //  135
    (1e134, 7.851796350329301e117), //  134
    (1e133, -2.235117235947686e116), //  133
    (1e132, 9.170432597638724e114), //  132
    (1e131, 8.797444499042768e114), //  131
    (1e130, -5.978307824605161e113), //  130
    (1e129, 1.7825564358147585e111), //  129
    (1e128, -7.51744869165182e111), //  128
    (1e127, 4.5070893321502055e110), //  127
    (1e126, 7.513223838100712e109), //  126
    (1e125, 7.513223838100712e108), //  125
    (1e124, 5.1646812553268785e107), //  124
    (1e123, 2.229003026859587e106), //  123
    (1e122, -1.4405947587245274e105), //  122
    (1e121, -3.734093374714599e104), //  121
    (1e120, 1.9996531652605798e103), //  120
    (1e119, 5.583244752745067e102), //  119
    (1e118, 3.343500010567262e101), //  118
    (1e117, -5.0555427725995036e100), //  117
    (1e116, -1.5559416129466843e99), //  116
    (1e115, -1.5559416129466843e98), //  115
    (1e114, -1.5559416129466843e97), //  114
    (1e113, -1.5559416129466842e96), //  113
    (1e112, 6.988006530736956e95), //  112
    (1e111, 4.318022735835818e94), //  111
    (1e110, -2.3569367514170256e93), //  110
    (1e109, 1.814912928116002e92), //  109
    (1e108, -3.399899171300283e91), //  108
    (1e107, 3.118615952970073e90), //  107
    (1e106, -9.103599905036844e89), //  106
    (1e105, 6.174169917471802e88), //  105
    (1e104, -1.9156750857346687e86), //  104
    (1e103, -1.915675085734669e85), //  103
    (1e102, 2.2950486734754662e85), //  102
    (1e101, 2.295048673475466e84), //  101
    (1e100, -1.5902891109759918e83), //  100
    (1e99, 3.266383119588331e82), //   99
    (1e98, 2.309629754856292e80), //   98
    (1e97, -7.357587384771125e80), //   97
    (1e96, -4.9861653971908895e79), //   96
    (1e95, -2.0218879127155947e78), //   95
    (1e94, -2.0218879127155946e77), //   94
    (1e93, -4.3377296974619187e76), //   93
    (1e92, -4.337729697461919e75), //   92
    (1e91, -7.95623248612805e74), //   91
    (1e90, 3.35158872845361e73), //   90
    (1e89, 5.246334248081951e71), //   89
    (1e88, 4.0583275543649637e71), //   88
    (1e87, 4.058327554364964e70), //   87
    (1e86, -1.4630695230674873e69), //   86
    (1e85, -1.4630695230674873e68), //   85
    (1e84, -5.77666098981159e67), //   84
    (1e83, -3.0806663230965258e66), //   83
    (1e82, 3.6593203436911345e65), //   82
    (1e81, 7.871812010433421e64), //   81
    (1e80, -2.6609864708367274e61), //   80
    (1e79, 3.2643992499340446e62), //   79
    (1e78, -8.493621433689703e60), //   78
    (1e77, 1.721738727445414e60), //   77
    (1e76, -4.706013449590547e59), //   76
    (1e75, 7.34602188235188e58), //   75
    (1e74, 4.8351811881972075e57), //   74
    (1e73, 1.6966303205038675e56), //   73
    (1e72, 5.619818905120543e55), //   72
    (1e71, -4.1881525564211456e54), //   71
    (1e70, -7.253143638152923e53), //   70
    (1e69, -7.253143638152923e52), //   69
    (1e68, 4.719477774861833e51), //   68
    (1e67, 1.726322421608144e50), //   67
    (1e66, 5.467766613175255e49), //   66
    (1e65, 7.909613737163662e47), //   65
    (1e64, -2.1320419009454396e47), //   64
    (1e63, -5.785795994272697e46), //   63
    (1e62, -3.5021996859431613e45), //   62
    (1e61, 5.061286470292598e44), //   61
    (1e60, 5.061286470292598e43), //   60
    (1e59, 2.831211950439536e42), //   59
    (1e58, 5.618805100255864e41), //   58
    (1e57, -4.834669211555366e40), //   57
    (1e56, -9.190283508143379e39), //   56
    (1e55, -1.0235067020408552e38), //   55
    (1e54, -7.829154040459625e37), //   54
    (1e53, 6.779051325638373e35), //   53
    (1e52, 6.779051325638372e34), //   52
    (1e51, 6.779051325638372e33), //   51
    (1e50, -7.629769841091887e33), //   50
    (1e49, 5.3509723052451824e32), //   49
    (1e48, -4.38458430450762e31), //   48
    (1e47, -4.38458430450762e30), //   47
    (1e46, 6.860180964052979e28), //   46
    (1e45, 7.024271097546445e28), //   45
    (1e44, -8.821361405306423e27), //   44
    (1e43, -1.393721169594141e26), //   43
    (1e42, -4.488571267807592e25), //   42
    (1e41, -6.200086450407783e23), //   41
    (1e40, -3.037860284270037e23), //   40
    (1e39, 6.029083362839682e22), //   39
    (1e38, 2.251190176543966e21), //   38
    (1e37, 4.6123734179787886e20), //   37
    (1e36, -4.242063737401796e19), //   36
    (1e35, 3.1366338920820244e18), //   35
    (1e34, 5.4424769012957184e17), //   34
    (1e33, 5.442476901295718e16), //   33
    (1e32, -5366162204393472.0), //   32
    (1e31, 364103705034752.0), //   31
    (1e30, -19884624838656.0), //   30
    (1e29, 8566849142784.0), //   29
    (1e28, 416880263168.0), //   28
    (1e27, -13287555072.0), //   27
    (1e26, -4764729344.0), //   26
    (1e25, -905969664.0), //   25
    (1e24, 16777216.0), //   24
    (1e23, 8388608.0), //   23
    (1e22, 0.0), //   22
    (1e21, 0.0), //   21
    (1e20, 0.0), //   20
    (1e19, 0.0), //   19
    (1e18, 0.0), //   18
    (1e17, 0.0), //   17
    (1e16, 0.0), //   16
    (1000000000000000.0, 0.0), //   15
    (100000000000000.0, 0.0), //   14
    (10000000000000.0, 0.0), //   13
    (1000000000000.0, 0.0), //   12
    (100000000000.0, 0.0), //   11
    (10000000000.0, 0.0), //   10
    (1000000000.0, 0.0), //    9
    (100000000.0, 0.0), //    8
    (10000000.0, 0.0), //    7
    (1000000.0, 0.0), //    6
    (100000.0, 0.0), //    5
    (10000.0, 0.0), //    4
    (1000.0, 0.0), //    3
    (100.0, 0.0), //    2
    (10.0, 0.0), //    1
    (1.0, 0.0), //    0
    (0.1, -5.551115123125783e-18), //   -1
    (0.01, -2.0816681711721684e-19), //   -2
    (0.001, -2.0816681711721686e-20), //   -3
    (0.0001, -4.79217360238593e-21), //   -4
    (1e-5, -8.180305391403131e-22), //   -5
    (1e-6, 4.525188817411374e-23), //   -6
    (1e-7, 4.525188817411374e-24), //   -7
    (1e-8, -2.092256083012847e-25), //   -8
    (1e-9, -6.228159145777985e-26), //   -9
    (1e-10, -3.643219731549774e-27), //  -10
    (1e-11, 6.050303071806019e-28), //  -11
    (1e-12, 2.0113352370744385e-29), //  -12
    (1e-13, -3.037374556340037e-30), //  -13
    (1e-14, 1.1806906454401013e-32), //  -14
    (1e-15, -7.770539987666108e-32), //  -15
    (1e-16, 2.0902213275965398e-33), //  -16
    (1e-17, -7.154242405462192e-34), //  -17
    (1e-18, -7.154242405462193e-35), //  -18
    (1e-19, 2.475407316473987e-36), //  -19
    (1e-20, 5.484672854579043e-37), //  -20
    (1e-21, 9.246254777210363e-38), //  -21
    (1e-22, -4.859677432657087e-39), //  -22
    (1e-23, 3.956530198510069e-40), //  -23
    (1e-24, 7.629950044829718e-41), //  -24
    (1e-25, -3.849486974919184e-42), //  -25
    (1e-26, -3.849486974919184e-43), //  -26
    (1e-27, -3.849486974919184e-44), //  -27
    (1e-28, 2.876745653839938e-45), //  -28
    (1e-29, 5.679342582489572e-46), //  -29
    (1e-30, -8.333642060758599e-47), //  -30
    (1e-31, -8.333642060758598e-48), //  -31
    (1e-32, -5.59673099762419e-49), //  -32
    (1e-33, -5.596730997624191e-50), //  -33
    (1e-34, 7.232539610818348e-51), //  -34
    (1e-35, -7.8575451945823805e-53), //  -35
    (1e-36, 5.8961572557722515e-53), //  -36
    (1e-37, -6.632427322784916e-54), //  -37
    (1e-38, 3.8080598260127236e-55), //  -38
    (1e-39, 7.070712060011985e-56), //  -39
    (1e-40, 7.070712060011986e-57), //  -40
    (1e-41, -5.761291134237854e-59), //  -41
    (1e-42, -3.76231293568869e-59), //  -42
    (1e-43, -7.745042713519821e-60), //  -43
    (1e-44, 4.700987842202463e-61), //  -44
    (1e-45, 1.589480203271892e-62), //  -45
    (1e-46, -2.2999043453913218e-63), //  -46
    (1e-47, 2.5618263404376953e-64), //  -47
    (1e-48, 2.5618263404376953e-65), //  -48
    (1e-49, 6.360053438741615e-66), //  -49
    (1e-50, -7.616223705782342e-68), //  -50
    (1e-51, -7.616223705782343e-69), //  -51
    (1e-52, -7.616223705782342e-70), //  -52
    (1e-53, -3.0798762147578723e-70), //  -53
    (1e-54, -3.079876214757873e-71), //  -54
    (1e-55, 5.423954167728123e-73), //  -55
    (1e-56, -3.9854441226405437e-73), //  -56
    (1e-57, 4.504255013759499e-74), //  -57
    (1e-58, -2.57049426657387e-75), //  -58
    (1e-59, -2.57049426657387e-76), //  -59
    (1e-60, 2.9566536086865743e-77), //  -60
    (1e-61, -3.9522812353889814e-78), //  -61
    (1e-62, -3.9522812353889814e-79), //  -62
    (1e-63, -6.651083908855995e-80), //  -63
    (1e-64, 3.469426116645307e-81), //  -64
    (1e-65, 7.686305293937516e-82), //  -65
    (1e-66, 2.415206322322255e-83), //  -66
    (1e-67, 5.709643179581793e-84), //  -67
    (1e-68, -6.644495035141476e-85), //  -68
    (1e-69, 3.650620143794582e-86), //  -69
    (1e-70, 4.3339665037706365e-88), //  -70
    (1e-71, 8.476455383920859e-88), //  -71
    (1e-72, 3.4495436754559866e-89), //  -72
    (1e-73, 3.077238576654419e-91), //  -73
    (1e-74, 4.234998629903623e-91), //  -74
    (1e-75, 4.2349986299036234e-92), //  -75
    (1e-76, 7.303182045714702e-93), //  -76
    (1e-77, 7.303182045714702e-94), //  -77
    (1e-78, 1.1212716490748558e-96), //  -78
    (1e-79, 1.1212716490748559e-97), //  -79
    (1e-80, 3.857468248661244e-97), //  -80
    (1e-81, 3.857468248661244e-98), //  -81
    (1e-82, 3.8574682486612444e-99), //  -82
    (1e-83, -3.4576510555453157e-100), //  -83
    (1e-84, -3.457651055545316e-101), //  -84
    (1e-85, 2.2572859008660592e-102), //  -85
    (1e-86, -8.458220892405268e-103), //  -86
    (1e-87, -1.761029146610689e-104), //  -87
    (1e-88, 6.6104605356325366e-105), //  -88
    (1e-89, -3.853901567171495e-106), //  -89
    (1e-90, 5.062493089968514e-108), //  -90
    (1e-91, -2.2188449886083652e-108), //  -91
    (1e-92, 1.1875228833981554e-109), //  -92
    (1e-93, 9.703442563414457e-110), //  -93
    (1e-94, 4.380992763404269e-111), //  -94
    (1e-95, 1.0544616383979008e-112), //  -95
    (1e-96, 9.37078945091382e-113), //  -96
    (1e-97, -3.623472756142304e-114), //  -97
    (1e-98, 6.122223899149789e-115), //  -98
    (1e-99, -1.9991899802602883e-116), //  -99
    (1e-100, -1.9991899802602883e-117), // -100
    (1e-101, -5.17161727690485e-118), // -101
    (1e-102, 6.724985085512256e-119), // -102
    (1e-103, 4.246526260008692e-120), // -103
    (1e-104, 7.344599791888147e-121), // -104
    (1e-105, 3.4720078770388284e-122), // -105
    (1e-106, 5.892377823819652e-123), // -106
    (1e-107, -1.585470431324074e-125), // -107
    (1e-108, -3.940375084977445e-125), // -108
    (1e-109, 7.86909967328852e-127), // -109
    (1e-110, -5.1221963480540186e-127), // -110
    (1e-111, -8.815387795168314e-128), // -111
    (1e-112, 5.03408013151029e-129), // -112
    (1e-113, 2.148774313452248e-130), // -113
    (1e-114, -5.064490231692858e-131), // -114
    (1e-115, -5.064490231692858e-132), // -115
    (1e-116, 5.708726942017561e-134), // -116
    (1e-117, -2.951229134482378e-134), // -117
    (1e-118, 1.4513981513727895e-135), // -118
    (1e-119, -1.30024390228669e-136), // -119
    (1e-120, 2.1393086647876594e-137), // -120
    (1e-121, 2.1393086647876593e-138), // -121
    (1e-122, -5.9221426642928475e-139), // -122
    (1e-123, -5.922142664292847e-140), // -123
    (1e-124, 6.673875037395444e-141), // -124
    (1e-125, -1.198636026159738e-142), // -125
    (1e-126, 5.361789860136247e-143), // -126
    (1e-127, -2.838742497733734e-144), // -127
    (1e-128, -5.401408859568103e-145), // -128
    (1e-129, 7.411922949603743e-146), // -129
    (1e-130, -8.604741811861064e-147), // -130
    (1e-131, 1.4056736640544399e-148), // -131
    (1e-132, 1.40567366405444e-149), // -132
    (1e-133, -6.414963426504548e-150), // -133
    (1e-134, -3.9710143357048646e-151), // -134
    (1e-135, -3.971014335704865e-152), // -135
    (1e-136, -1.5234388133035856e-154), // -136
    (1e-137, 2.2343251526537078e-154), // -137
    (1e-138, -6.71568372478654e-155), // -138
    (1e-139, -2.9865133591864373e-156), // -139
    (1e-140, 1.674949597813692e-157), // -140
    (1e-141, -4.151879098436469e-158), // -141
    (1e-142, -4.1518790984364693e-159), // -142
    (1e-143, 4.952540739454408e-160), // -143
    (1e-144, 4.952540739454408e-161), // -144
    (1e-145, 8.508954738630531e-162), // -145
    (1e-146, -2.6048390087948555e-163), // -146
    (1e-147, 2.9520578649178384e-164), // -147
    (1e-148, 6.425118410988272e-165), // -148
    (1e-149, 2.08379272840023e-166), // -149
    (1e-150, -6.295358232172964e-168), // -150
    (1e-151, 6.153785555826519e-168), // -151
    (1e-152, -6.564942029880635e-169), // -152
    (1e-153, -3.9152071161916445e-170), // -153
    (1e-154, 2.7091301680308315e-171), // -154
    (1e-155, -1.431080634608216e-172), // -155
    (1e-156, -4.018712386257621e-173), // -156
    (1e-157, 5.684906682427647e-174), // -157
    (1e-158, -6.444617153428937e-175), // -158
    (1e-159, 1.1363352439814277e-176), // -159
    (1e-160, 1.1363352439814277e-177), // -160
    (1e-161, -2.8120774630031374e-178), // -161
    (1e-162, 4.591196362592922e-179), // -162
    (1e-163, 7.675893789924614e-180), // -163
    (1e-164, 3.8200220057599995e-181), // -164
    (1e-165, -9.998177244457687e-183), // -165
    (1e-166, -4.012217555824374e-183), // -166
    (1e-167, -2.4671776660111743e-185), // -167
    (1e-168, -4.953592503130188e-185), // -168
    (1e-169, -2.011795792799519e-186), // -169
    (1e-170, 1.6654500951138174e-187), // -170
    (1e-171, 1.6654500951138175e-188), // -171
    (1e-172, -4.0802466047507706e-189), // -172
    (1e-173, -4.0802466047507707e-190), // -173
    (1e-174, 4.085789420184388e-192), // -174
    (1e-175, 4.085789420184388e-193), // -175
    (1e-176, 4.085789420184388e-194), // -176
    (1e-177, 4.792197640035245e-194), // -177
    (1e-178, 4.792197640035245e-195), // -178
    (1e-179, -2.0572065756160147e-196), // -179
    (1e-180, -2.0572065756160147e-197), // -180
    (1e-181, -4.732755097354788e-198), // -181
    (1e-182, -4.732755097354788e-199), // -182
    (1e-183, -5.522105321379547e-201), // -183
    (1e-184, -5.777891238658996e-201), // -184
    (1e-185, 7.542096444923057e-203), // -185
    (1e-186, 8.919335748431433e-203), // -186
    (1e-187, -1.287071881492476e-204), // -187
    (1e-188, 5.091932887209967e-205), // -188
    (1e-189, -6.868701054107114e-206), // -189
    (1e-190, -1.88510357855833e-207), // -190
    (1e-191, -1.8851035785583302e-208), // -191
    (1e-192, -9.671974634103305e-209), // -192
    (1e-193, -4.8051802243876956e-210), // -193
    (1e-194, -1.7634337183154398e-211), // -194
    (1e-195, -9.367799983496079e-212), // -195
    (1e-196, -4.61507106775818e-213), // -196
    (1e-197, 1.3258400769141948e-214), // -197
    (1e-198, 8.751979007754662e-215), // -198
    (1e-199, 1.7899737600917242e-216), // -199
    (1e-200, 1.789973760091724e-217), // -200
    (1e-201, 5.416018159916171e-218), // -201
    (1e-202, -3.649092839644947e-219), // -202
    (1e-203, -3.649092839644947e-220), // -203
    (1e-204, -1.080338554413851e-222), // -204
    (1e-205, -1.0803385544138508e-223), // -205
    (1e-206, -2.8744861868504178e-223), // -206
    (1e-207, 7.499710055933455e-224), // -207
    (1e-208, -9.790617015372999e-225), // -208
    (1e-209, -4.3873898055897326e-226), // -209
    (1e-210, -4.387389805589733e-227), // -210
    (1e-211, -8.60866106323291e-228), // -211
    (1e-212, 4.582811616902019e-229), // -212
    (1e-213, 4.582811616902019e-230), // -213
    (1e-214, 8.705146829444185e-231), // -214
    (1e-215, -4.177150709750082e-232), // -215
    (1e-216, -4.177150709750082e-233), // -216
    (1e-217, -8.20286869074829e-234), // -217
    (1e-218, -3.17072121450053e-235), // -218
    (1e-219, -3.17072121450053e-236), // -219
    (1e-220, 7.606440013180328e-238), // -220
    (1e-221, -1.696459258568569e-238), // -221
    (1e-222, -4.767838333426821e-239), // -222
    (1e-223, 2.910609353718809e-240), // -223
    (1e-224, -1.8884204507472098e-241), // -224
    (1e-225, 4.110366804835314e-242), // -225
    (1e-226, 7.859608839574391e-243), // -226
    (1e-227, 5.5163325678624684e-244), // -227
    (1e-228, -3.2709534510572446e-245), // -228
    (1e-229, -6.932322625607125e-246), // -229
    (1e-230, -4.64396689151345e-247), // -230
    (1e-231, 1.0769224437207383e-248), // -231
    (1e-232, -2.498633390800629e-249), // -232
    (1e-233, 4.205533798926935e-250), // -233
    (1e-234, 4.205533798926935e-251), // -234
    (1e-235, 4.2055337989269347e-252), // -235
    (1e-236, -4.5238505626974977e-253), // -236
    (1e-237, 9.320146633177728e-255), // -237
    (1e-238, 9.320146633177728e-256), // -238
    (1e-239, -7.592774752331086e-256), // -239
    (1e-240, 3.063212017229988e-257), // -240
    (1e-241, 3.0632120172299876e-258), // -241
    (1e-242, 3.0632120172299876e-259), // -242
    (1e-243, 4.61652747317616e-261), // -243
    (1e-244, 6.965550922098545e-261), // -244
    (1e-245, 6.965550922098545e-262), // -245
    (1e-246, 4.424965697574745e-263), // -246
    (1e-247, -1.9264973637347564e-264), // -247
    (1e-248, 2.0431670495836817e-265), // -248
    (1e-249, -5.39995372538839e-266), // -249
    (1e-250, -5.39995372538839e-267), // -250
    (1e-251, -1.5233283217571027e-268), // -251
    (1e-252, 5.745344310051561e-269), // -252
    (1e-253, -6.369110076296212e-270), // -253
    (1e-254, 8.773957906638505e-271), // -254
    (1e-255, -6.904595826956932e-273), // -255
    (1e-256, 2.2671708827212437e-273), // -256
    (1e-257, 2.2671708827212437e-274), // -257
    (1e-258, 4.5778196838282254e-275), // -258
    (1e-259, -6.975424321706684e-276), // -259
    (1e-260, 3.8557419334822936e-277), // -260
    (1e-261, 1.5992489636512566e-278), // -261
    (1e-262, -1.2213672486375395e-279), // -262
    (1e-263, -1.2213672486375395e-280), // -263
    (1e-264, -1.2213672486375396e-281), // -264
    (1e-265, 1.533140771175738e-282), // -265
    (1e-266, 1.533140771175738e-283), // -266
    (1e-267, 1.533140771175738e-284), // -267
    (1e-268, 4.223090009274642e-285), // -268
    (1e-269, 4.223090009274642e-286), // -269
    (1e-270, -4.183001359784433e-287), // -270
    (1e-271, 3.6977092987084495e-288), // -271
    (1e-272, 6.9813387397471505e-289), // -272
    (1e-273, -9.436808465446355e-290), // -273
    (1e-274, 3.389869038611072e-291), // -274
    (1e-275, 6.596538414625428e-292), // -275
    (1e-276, -9.436808465446355e-293), // -276
    (1e-277, 3.0892437846097255e-294), // -277
    (1e-278, 6.220756847123746e-295), // -278
    (1e-279, -5.52241713730383e-296), // -279
    (1e-280, 4.263561183052483e-297), // -280
    (1e-281, -1.8526752671702123e-298), // -281
    (1e-282, -1.8526752671702124e-299), // -282
    (1e-283, 5.3147893229345085e-300), // -283
    (1e-284, -3.6445414146963927e-301), // -284
    (1e-285, -7.377595888709268e-302), // -285
    (1e-286, -5.044436842451221e-303), // -286
    (1e-287, -2.1279880346286618e-304), // -287
    (1e-288, -5.773549044406861e-305), // -288
    (1e-289, -1.216597782184112e-306), // -289
    (1e-290, -6.912786859962548e-307), // -290
    (1e-291, 3.767567660872019e-308), // -291
];
